use clap::Args;

/// List every stored root grant.
#[derive(Args, Debug, Clone)]
pub struct Grants {}

#[derive(Debug, thiserror::Error)]
pub enum GrantsError {}

#[async_trait::async_trait]
impl crate::op::Op for Grants {
    type Error = GrantsError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let grants = ctx.fs.grants().all();
        if grants.is_empty() {
            return Ok("No roots granted".to_string());
        }
        let output = grants
            .iter()
            .map(|g| format!("{} (granted {})", g.root_id, g.granted_at_iso()))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(output)
    }
}
