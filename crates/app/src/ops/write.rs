use clap::Args;
use common::grant::RootId;
use common::vfs::TreeFsError;

/// Overwrite an existing file's contents in full.
#[derive(Args, Debug, Clone)]
pub struct Write {
    /// Root token (see `arbor grants`)
    pub root: String,

    /// Path of the file inside the root
    pub path: String,

    /// New contents
    pub contents: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error(transparent)]
    Fs(#[from] TreeFsError),
}

#[async_trait::async_trait]
impl crate::op::Op for Write {
    type Error = WriteError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let root = RootId::from(self.root.as_str());
        ctx.fs.write_file(&root, &self.path, &self.contents).await?;
        Ok(format!("Wrote {} bytes to {}", self.contents.len(), self.path))
    }
}
