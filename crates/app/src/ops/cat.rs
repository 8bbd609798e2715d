use clap::Args;
use common::grant::RootId;
use common::vfs::TreeFsError;

/// Print a file's contents.
#[derive(Args, Debug, Clone)]
pub struct Cat {
    /// Root token (see `arbor grants`)
    pub root: String,

    /// Path of the file inside the root
    pub path: String,

    /// Also print the metadata record
    #[arg(long)]
    pub meta: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CatError {
    #[error(transparent)]
    Fs(#[from] TreeFsError),
}

#[async_trait::async_trait]
impl crate::op::Op for Cat {
    type Error = CatError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let root = RootId::from(self.root.as_str());
        let contents = ctx.fs.read_file(&root, &self.path).await?;

        if self.meta {
            let mime = contents
                .meta
                .mime
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string());
            let modified = contents
                .meta
                .last_modified_iso()
                .unwrap_or_else(|| "-".to_string());
            let parent = contents
                .meta
                .parent
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "-".to_string());
            Ok(format!(
                "{}\n--\nname: {}\nmime: {}\nsize: {}\nmodified: {}\nparent: {}",
                contents.text,
                contents.meta.name,
                mime,
                contents.meta.size.unwrap_or(0),
                modified,
                parent
            ))
        } else {
            Ok(contents.text)
        }
    }
}
