use clap::Args;
use common::grant::RootId;
use common::vfs::TreeFsError;

/// Create a new file and write its initial contents.
#[derive(Args, Debug, Clone)]
pub struct Create {
    /// Root token (see `arbor grants`)
    pub root: String,

    /// Name of the new file
    pub name: String,

    /// Initial contents (defaults to empty)
    #[arg(default_value = "")]
    pub contents: String,

    /// Directory inside the root to create the file in
    #[arg(long, default_value = "")]
    pub dir: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error(transparent)]
    Fs(#[from] TreeFsError),
}

#[async_trait::async_trait]
impl crate::op::Op for Create {
    type Error = CreateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let root = RootId::from(self.root.as_str());
        let parent = ctx
            .fs
            .create_file(&root, &self.dir, &self.name, &self.contents)
            .await?;
        Ok(format!("Created {} in {}", self.name, parent.id))
    }
}
