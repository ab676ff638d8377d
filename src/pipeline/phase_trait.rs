use super::context::BuildContext;
use anyhow::Result;

/// One step of the site build
pub trait BuildPhase {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut BuildContext) -> Result<()>;
}
