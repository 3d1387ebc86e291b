//! Built-in skill ontology. Pure data: one row per canonical skill.
//!
//! IDs and aliases are unique across the table; `Taxonomy::from_specs` rejects
//! any row that breaks that.

use super::SkillDomain;

/// Static description of a single skill node, converted into an owned
/// `SkillNode` when the taxonomy is built.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub domain: SkillDomain,
    pub category: &'static str,
    pub aliases: &'static [&'static str],
    pub prerequisites: &'static [&'static str],
    pub related: &'static [&'static str],
}

const fn tech(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    aliases: &'static [&'static str],
    prerequisites: &'static [&'static str],
    related: &'static [&'static str],
) -> NodeSpec {
    NodeSpec {
        id,
        name,
        domain: SkillDomain::Technical,
        category,
        aliases,
        prerequisites,
        related,
    }
}

const fn soft(
    id: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    related: &'static [&'static str],
) -> NodeSpec {
    NodeSpec {
        id,
        name,
        domain: SkillDomain::Soft,
        category: "interpersonal",
        aliases,
        prerequisites: &[],
        related,
    }
}

const fn domain(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    aliases: &'static [&'static str],
    related: &'static [&'static str],
) -> NodeSpec {
    NodeSpec {
        id,
        name,
        domain: SkillDomain::Domain,
        category,
        aliases,
        prerequisites: &[],
        related,
    }
}

pub const BUILTIN_NODES: &[NodeSpec] = &[
    // Programming languages
    tech("python", "Python", "programming_language", &["py", "python3"], &[], &["django", "flask", "fastapi", "pandas"]),
    tech("go", "Go", "programming_language", &["golang"], &[], &["docker", "kubernetes", "microservices"]),
    tech("javascript", "JavaScript", "programming_language", &["js", "ecmascript", "es6"], &[], &["typescript", "node_js", "react"]),
    tech("typescript", "TypeScript", "programming_language", &["ts"], &["javascript"], &["javascript", "react", "angular"]),
    tech("java", "Java", "programming_language", &["jvm", "java8", "java17"], &[], &["spring_boot", "kotlin", "scala"]),
    tech("rust", "Rust", "programming_language", &["rustlang"], &[], &["c_plus_plus", "go"]),
    tech("c_plus_plus", "C++", "programming_language", &["cpp", "cplusplus"], &[], &["rust", "c"]),
    tech("c", "C", "programming_language", &["ansi c", "c99"], &[], &["c_plus_plus", "linux"]),
    tech("c_sharp", "C#", "programming_language", &["csharp", "c sharp"], &[], &["dotnet", "java"]),
    tech("kotlin", "Kotlin", "programming_language", &["kt"], &[], &["java", "android"]),
    tech("swift", "Swift", "programming_language", &["swiftui"], &[], &["ios"]),
    tech("ruby", "Ruby", "programming_language", &[], &[], &["ruby_on_rails"]),
    tech("php", "PHP", "programming_language", &["php8"], &[], &["laravel", "mysql"]),
    tech("scala", "Scala", "programming_language", &[], &["java"], &["spark", "java"]),
    tech("r", "R", "programming_language", &["r language", "rlang"], &[], &["statistics", "data_analysis"]),
    tech("sql", "SQL", "programming_language", &["structured query language", "t-sql", "tsql"], &[], &["postgresql", "mysql", "data_analysis"]),
    tech("bash", "Bash", "scripting", &["shell scripting", "shell", "sh"], &["linux"], &["linux", "ci_cd"]),
    // Frameworks and runtimes
    tech("react", "React", "frontend_framework", &["reactjs", "react.js"], &["javascript"], &["typescript", "redux", "next_js"]),
    tech("redux", "Redux", "frontend_framework", &["redux toolkit"], &["react"], &["react"]),
    tech("next_js", "Next.js", "frontend_framework", &["nextjs"], &["react"], &["react", "typescript"]),
    tech("angular", "Angular", "frontend_framework", &["angularjs", "angular.js"], &["typescript"], &["typescript", "rxjs"]),
    tech("rxjs", "RxJS", "frontend_framework", &["reactive extensions"], &["javascript"], &["angular"]),
    tech("vue", "Vue", "frontend_framework", &["vuejs", "vue.js"], &["javascript"], &["javascript", "typescript"]),
    tech("node_js", "Node.js", "backend_framework", &["node", "nodejs", "node js"], &["javascript"], &["express", "typescript"]),
    tech("express", "Express", "backend_framework", &["expressjs", "express.js"], &["node_js"], &["node_js", "rest_api"]),
    tech("django", "Django", "backend_framework", &["django rest framework", "drf"], &["python"], &["python", "postgresql"]),
    tech("flask", "Flask", "backend_framework", &[], &["python"], &["python", "rest_api"]),
    tech("fastapi", "FastAPI", "backend_framework", &["fast api"], &["python"], &["python", "rest_api"]),
    tech("spring_boot", "Spring Boot", "backend_framework", &["spring", "springboot", "spring framework"], &["java"], &["java", "microservices"]),
    tech("ruby_on_rails", "Ruby on Rails", "backend_framework", &["rails", "ror"], &["ruby"], &["ruby", "postgresql"]),
    tech("laravel", "Laravel", "backend_framework", &[], &["php"], &["php", "mysql"]),
    tech("dotnet", ".NET", "backend_framework", &["dotnet core", ".net core", "asp.net", "asp.net core"], &["c_sharp"], &["c_sharp", "azure"]),
    tech("android", "Android", "mobile", &["android development"], &["kotlin"], &["kotlin", "java"]),
    tech("ios", "iOS", "mobile", &["ios development"], &["swift"], &["swift"]),
    // Cloud, infrastructure and delivery
    tech("aws", "AWS", "cloud", &["amazon web services", "amazon aws"], &[], &["docker", "terraform", "linux"]),
    tech("azure", "Azure", "cloud", &["microsoft azure"], &[], &["dotnet", "terraform"]),
    tech("gcp", "Google Cloud", "cloud", &["google cloud platform", "gcloud"], &[], &["kubernetes", "terraform"]),
    tech("docker", "Docker", "devops", &["containers", "containerization", "dockerfile"], &["linux"], &["kubernetes", "ci_cd"]),
    tech("kubernetes", "Kubernetes", "devops", &["k8s", "kube"], &["docker"], &["docker", "helm", "terraform"]),
    tech("helm", "Helm", "devops", &["helm charts"], &["kubernetes"], &["kubernetes"]),
    tech("terraform", "Terraform", "devops", &["infrastructure as code", "iac", "tf"], &[], &["aws", "ansible"]),
    tech("ansible", "Ansible", "devops", &[], &["linux"], &["terraform", "linux"]),
    tech("ci_cd", "CI/CD", "devops", &["cicd", "continuous integration", "continuous delivery", "continuous deployment"], &["git"], &["jenkins", "github_actions", "docker"]),
    tech("jenkins", "Jenkins", "devops", &[], &["ci_cd"], &["ci_cd"]),
    tech("github_actions", "GitHub Actions", "devops", &["gh actions"], &["git"], &["ci_cd", "git"]),
    tech("linux", "Linux", "operating_system", &["unix", "gnu/linux"], &[], &["bash", "docker"]),
    tech("git", "Git", "tooling", &["version control", "github", "gitlab"], &[], &["ci_cd"]),
    // Data stores and pipelines
    tech("postgresql", "PostgreSQL", "database", &["postgres", "psql", "pg"], &["sql"], &["sql", "mysql"]),
    tech("mysql", "MySQL", "database", &["mariadb"], &["sql"], &["sql", "postgresql"]),
    tech("mongodb", "MongoDB", "database", &["mongo"], &[], &["node_js", "redis"]),
    tech("redis", "Redis", "database", &[], &[], &["mongodb", "caching"]),
    tech("elasticsearch", "Elasticsearch", "database", &["elastic search", "elk", "opensearch"], &[], &["kafka"]),
    tech("kafka", "Kafka", "data_engineering", &["apache kafka"], &[], &["spark", "microservices"]),
    tech("spark", "Spark", "data_engineering", &["apache spark", "pyspark"], &[], &["scala", "python", "airflow"]),
    tech("airflow", "Airflow", "data_engineering", &["apache airflow"], &["python"], &["spark", "python"]),
    tech("pandas", "Pandas", "data_science", &[], &["python"], &["numpy", "data_analysis"]),
    tech("numpy", "NumPy", "data_science", &[], &["python"], &["pandas", "scikit_learn"]),
    // Machine learning and analytics
    tech("machine_learning", "Machine Learning", "machine_learning", &["ml"], &["python", "statistics"], &["deep_learning", "scikit_learn", "statistics"]),
    tech("deep_learning", "Deep Learning", "machine_learning", &["dl", "neural networks"], &["machine_learning"], &["pytorch", "tensorflow"]),
    tech("tensorflow", "TensorFlow", "machine_learning", &["tf2", "keras"], &["python"], &["deep_learning", "pytorch"]),
    tech("pytorch", "PyTorch", "machine_learning", &["torch"], &["python"], &["deep_learning", "tensorflow"]),
    tech("scikit_learn", "scikit-learn", "machine_learning", &["sklearn", "scikit"], &["python"], &["machine_learning", "pandas"]),
    tech("nlp", "Natural Language Processing", "machine_learning", &["text mining"], &["machine_learning"], &["deep_learning", "python"]),
    tech("computer_vision", "Computer Vision", "machine_learning", &["cv", "image processing"], &["deep_learning"], &["deep_learning", "pytorch"]),
    tech("data_analysis", "Data Analysis", "analytics", &["data analytics", "analytics"], &[], &["sql", "pandas", "data_visualization"]),
    tech("data_visualization", "Data Visualization", "analytics", &["dataviz", "tableau", "power bi"], &[], &["data_analysis"]),
    tech("statistics", "Statistics", "analytics", &["statistical analysis", "stats"], &[], &["r", "machine_learning"]),
    // Architecture and practices
    tech("rest_api", "REST API", "architecture", &["restful", "restful api", "rest apis"], &[], &["graphql", "microservices"]),
    tech("graphql", "GraphQL", "architecture", &["gql"], &[], &["rest_api"]),
    tech("microservices", "Microservices", "architecture", &["microservice architecture", "micro services"], &["rest_api"], &["docker", "kubernetes", "distributed_systems"]),
    tech("distributed_systems", "Distributed Systems", "architecture", &["distributed computing"], &[], &["microservices", "kafka"]),
    tech("system_design", "System Design", "architecture", &["software architecture", "systems design"], &[], &["distributed_systems", "microservices"]),
    tech("caching", "Caching", "architecture", &["cache"], &[], &["redis"]),
    tech("unit_testing", "Unit Testing", "quality", &["testing", "test automation", "tdd", "test driven development"], &[], &["ci_cd"]),
    tech("security", "Application Security", "security", &["appsec", "cybersecurity", "secure coding"], &[], &["linux"]),
    // Soft skills
    soft("communication", "Communication", &["written communication", "verbal communication"], &["teamwork", "stakeholder_management"]),
    soft("leadership", "Leadership", &["team leadership", "people management"], &["mentoring", "communication"]),
    soft("teamwork", "Teamwork", &["collaboration", "team player"], &["communication"]),
    soft("problem_solving", "Problem Solving", &["problem-solving", "troubleshooting"], &["critical_thinking"]),
    soft("critical_thinking", "Critical Thinking", &["analytical thinking"], &["problem_solving"]),
    soft("mentoring", "Mentoring", &["coaching"], &["leadership"]),
    soft("time_management", "Time Management", &["prioritization"], &["project_management"]),
    soft("stakeholder_management", "Stakeholder Management", &["stakeholder communication"], &["communication"]),
    // Domain and process knowledge
    domain("project_management", "Project Management", "process", &["pmp", "program management"], &["agile", "time_management"]),
    domain("agile", "Agile", "process", &["agile methodology", "agile development"], &["scrum", "project_management"]),
    domain("scrum", "Scrum", "process", &["scrum master"], &["agile"]),
    domain("product_management", "Product Management", "business", &["product strategy", "product owner"], &["agile", "stakeholder_management"]),
    domain("fintech", "Financial Services", "industry", &["finance", "banking"], &["security"]),
    domain("healthcare", "Healthcare", "industry", &["health care", "healthtech", "hipaa"], &["data_privacy"]),
    domain("e_commerce", "E-commerce", "industry", &["ecommerce", "online retail"], &["product_management"]),
    domain("data_privacy", "Data Privacy", "compliance", &["gdpr", "privacy"], &["security"]),
];
