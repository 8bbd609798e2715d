use clap::Args;
use common::grant::RootId;
use common::vfs::TreeFsError;

/// List the children of a directory inside a granted root.
#[derive(Args, Debug, Clone)]
pub struct Ls {
    /// Root token (see `arbor grants`)
    pub root: String,

    /// Path inside the root (defaults to the root itself)
    #[arg(default_value = "")]
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LsError {
    #[error(transparent)]
    Fs(#[from] TreeFsError),
}

#[async_trait::async_trait]
impl crate::op::Op for Ls {
    type Error = LsError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let root = RootId::from(self.root.as_str());
        let records = ctx.fs.list_directory(&root, &self.path).await?;

        if records.is_empty() {
            return Ok("No items found".to_string());
        }
        let output = records
            .iter()
            .map(|r| {
                if r.is_dir() {
                    format!("{} (dir)", r.name)
                } else {
                    format!("{} (file, {} bytes)", r.name, r.size.unwrap_or(0))
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(output)
    }
}
