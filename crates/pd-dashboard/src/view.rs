//! In-memory view state and terminal rendering.
//!
//! The view holds the last successful result of each request. A card is
//! drawn only once its data has arrived; the health card frame is always
//! drawn because it is the one that updates over time.

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

use pd_protocol::{HealthStatus, ServiceInfo, WelcomeInfo};

const TITLE: &str = "AWS CI/CD Pipeline Demo";
const FOOTER: &str = "Deployed via AWS CodePipeline -> CodeBuild -> CodeDeploy";

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub welcome: Option<WelcomeInfo>,
    pub health: Option<HealthStatus>,
    pub info: Option<ServiceInfo>,
}

/// View state shared between the initial load and the refresh timer.
pub type SharedViewState = Arc<RwLock<ViewState>>;

impl ViewState {
    pub fn shared() -> SharedViewState {
        Arc::new(RwLock::new(Self::default()))
    }
}

/// Render the full dashboard as text.
pub fn render(view: &ViewState) -> String {
    view.to_string()
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {TITLE} ===")?;
        writeln!(f)?;

        if let Some(welcome) = &self.welcome {
            writeln!(f, "[Application Info]")?;
            writeln!(f, "  Message:     {}", welcome.message)?;
            writeln!(f, "  Version:     {}", welcome.version)?;
            writeln!(f, "  Environment: {}", welcome.environment)?;
            writeln!(f)?;
        }

        writeln!(f, "[Health Status]")?;
        if let Some(health) = &self.health {
            writeln!(
                f,
                "  Status:      {}",
                health.status.to_string().to_uppercase()
            )?;
            writeln!(f, "  Uptime:      {:.2} seconds", health.uptime)?;
            writeln!(
                f,
                "  Checked at:  {}",
                health.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            )?;
        }
        writeln!(f)?;

        if let Some(info) = &self.info {
            writeln!(f, "[System Information]")?;
            writeln!(f, "  Application: {}", info.application)?;
            writeln!(f, "  Description: {}", info.description)?;
            writeln!(f, "  Platform:    {}", info.platform)?;
            writeln!(f, "  Services:")?;
            for service in &info.services {
                writeln!(f, "    - {service}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{FOOTER}")
    }
}
