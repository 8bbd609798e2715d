use std::path::PathBuf;

use clap::Args;
use common::provider::LocalPicker;
use common::vfs::TreeFsError;

/// Grant access to a directory tree, as the platform picker would.
#[derive(Args, Debug, Clone)]
pub struct Grant {
    /// Directory to grant access to
    pub path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum GrantError {
    #[error(transparent)]
    Fs(#[from] TreeFsError),
}

#[async_trait::async_trait]
impl crate::op::Op for Grant {
    type Error = GrantError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let grant = ctx.fs.request_root(&LocalPicker::new(&self.path)).await?;
        Ok(format!(
            "Granted root {}\n- granted at: {}",
            grant.root_id,
            grant.granted_at_iso()
        ))
    }
}
