use clap::Args;
use common::grant::RootId;
use common::vfs::TreeFsError;

/// Delete a file inside a granted root.
#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// Root token (see `arbor grants`)
    pub root: String,

    /// Path of the file inside the root
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RmError {
    #[error(transparent)]
    Fs(#[from] TreeFsError),
}

#[async_trait::async_trait]
impl crate::op::Op for Rm {
    type Error = RmError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let root = RootId::from(self.root.as_str());
        ctx.fs.delete_file(&root, &self.path).await?;
        Ok(format!("Deleted {}", self.path))
    }
}
