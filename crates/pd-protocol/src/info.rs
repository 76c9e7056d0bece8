use serde::{Deserialize, Serialize};

/// AWS services making up the delivery pipeline, in stage order.
pub const PIPELINE_SERVICES: [&str; 3] = ["CodePipeline", "CodeBuild", "CodeDeploy"];

/// Body of `GET /api/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub application: String,
    pub description: String,
    pub services: Vec<String>,
    pub platform: String,
}

impl ServiceInfo {
    /// The fixed description of this deployment.
    pub fn pipeline_demo() -> Self {
        Self {
            application: "AWS CI/CD Demo App".to_string(),
            description: "Sample Node.js application deployed via AWS CodePipeline".to_string(),
            services: PIPELINE_SERVICES.iter().map(|s| s.to_string()).collect(),
            platform: "AWS EC2".to_string(),
        }
    }
}
