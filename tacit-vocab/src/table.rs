//! Hand-curated vocabulary: canonical names, domain groups, aliases.
//! Built once, read-only process-wide.

use tacit_core::models::EntityType;

/// Domain group a canonical term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Database,
    Framework,
    Language,
    Auth,
    AiMl,
    Infrastructure,
    Testing,
    BuildTool,
    ArchitecturePattern,
    CliTool,
}

impl Domain {
    /// Graph entity type this domain maps to.
    pub fn entity_type(self) -> EntityType {
        match self {
            Self::ArchitecturePattern => EntityType::Pattern,
            Self::Testing | Self::BuildTool | Self::CliTool => EntityType::Tool,
            Self::Database
            | Self::Framework
            | Self::Language
            | Self::Auth
            | Self::AiMl
            | Self::Infrastructure => EntityType::Technology,
        }
    }
}

/// Canonical term → domain group. All terms are lowercase.
pub const TERMS: &[(&str, Domain)] = &[
    // Databases
    ("postgresql", Domain::Database),
    ("mysql", Domain::Database),
    ("sqlite", Domain::Database),
    ("mongodb", Domain::Database),
    ("redis", Domain::Database),
    ("memcached", Domain::Database),
    ("elasticsearch", Domain::Database),
    ("cassandra", Domain::Database),
    ("dynamodb", Domain::Database),
    ("clickhouse", Domain::Database),
    // Frameworks
    ("react", Domain::Framework),
    ("vue", Domain::Framework),
    ("angular", Domain::Framework),
    ("svelte", Domain::Framework),
    ("nextjs", Domain::Framework),
    ("django", Domain::Framework),
    ("flask", Domain::Framework),
    ("fastapi", Domain::Framework),
    ("rails", Domain::Framework),
    ("laravel", Domain::Framework),
    ("spring", Domain::Framework),
    ("express", Domain::Framework),
    ("nest", Domain::Framework),
    ("axum", Domain::Framework),
    ("tokio", Domain::Framework),
    // Languages
    ("javascript", Domain::Language),
    ("typescript", Domain::Language),
    ("python", Domain::Language),
    ("rust", Domain::Language),
    ("go", Domain::Language),
    ("java", Domain::Language),
    ("kotlin", Domain::Language),
    ("swift", Domain::Language),
    ("ruby", Domain::Language),
    ("php", Domain::Language),
    ("elixir", Domain::Language),
    // Auth
    ("oauth2", Domain::Auth),
    ("jwt", Domain::Auth),
    ("saml", Domain::Auth),
    ("openid", Domain::Auth),
    ("auth0", Domain::Auth),
    ("keycloak", Domain::Auth),
    // AI / ML
    ("tensorflow", Domain::AiMl),
    ("pytorch", Domain::AiMl),
    ("openai", Domain::AiMl),
    ("anthropic", Domain::AiMl),
    ("langchain", Domain::AiMl),
    ("huggingface", Domain::AiMl),
    ("onnx", Domain::AiMl),
    ("rag", Domain::AiMl),
    // Infrastructure
    ("kubernetes", Domain::Infrastructure),
    ("docker", Domain::Infrastructure),
    ("terraform", Domain::Infrastructure),
    ("ansible", Domain::Infrastructure),
    ("aws", Domain::Infrastructure),
    ("gcp", Domain::Infrastructure),
    ("azure", Domain::Infrastructure),
    ("nginx", Domain::Infrastructure),
    ("kafka", Domain::Infrastructure),
    ("rabbitmq", Domain::Infrastructure),
    // Testing
    ("jest", Domain::Testing),
    ("pytest", Domain::Testing),
    ("vitest", Domain::Testing),
    ("cypress", Domain::Testing),
    ("playwright", Domain::Testing),
    ("selenium", Domain::Testing),
    ("junit", Domain::Testing),
    // Build tools
    ("webpack", Domain::BuildTool),
    ("vite", Domain::BuildTool),
    ("rollup", Domain::BuildTool),
    ("esbuild", Domain::BuildTool),
    ("babel", Domain::BuildTool),
    ("cargo", Domain::BuildTool),
    ("maven", Domain::BuildTool),
    ("gradle", Domain::BuildTool),
    ("pnpm", Domain::BuildTool),
    ("yarn", Domain::BuildTool),
    // Architecture patterns
    ("microservices", Domain::ArchitecturePattern),
    ("monolith", Domain::ArchitecturePattern),
    ("serverless", Domain::ArchitecturePattern),
    ("event-sourcing", Domain::ArchitecturePattern),
    ("cqrs", Domain::ArchitecturePattern),
    ("graphql", Domain::ArchitecturePattern),
    ("grpc", Domain::ArchitecturePattern),
    ("websocket", Domain::ArchitecturePattern),
    ("mvc", Domain::ArchitecturePattern),
    // CLI tools
    ("git", Domain::CliTool),
    ("bash", Domain::CliTool),
    ("zsh", Domain::CliTool),
    ("tmux", Domain::CliTool),
    ("curl", Domain::CliTool),
];

/// Variant spelling → canonical term.
pub const ALIASES: &[(&str, &str)] = &[
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("mongo", "mongodb"),
    ("elastic", "elasticsearch"),
    ("k8s", "kubernetes"),
    ("kube", "kubernetes"),
    ("oauth", "oauth2"),
    ("golang", "go"),
    ("next.js", "nextjs"),
    ("nestjs", "nest"),
    ("gql", "graphql"),
    ("dynamo", "dynamodb"),
    ("hugging face", "huggingface"),
];
