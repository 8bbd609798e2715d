use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use common::grant::GrantStore;
use common::provider::LocalProvider;
use common::vfs::TreeFs;

use crate::state::{AppState, StateError};

#[derive(Clone)]
pub struct OpContext {
    /// Facade over the local provider and the persisted grant table.
    pub fs: TreeFs,
}

impl OpContext {
    /// Build the context from the state directory (custom or ~/.arbor).
    pub fn new(state_dir: Option<PathBuf>) -> Result<Self, StateError> {
        let state = AppState::load(state_dir)?;
        let grants = GrantStore::open(&state.grants_path)?;
        tracing::debug!(
            state_dir = %state.state_dir.display(),
            grants = grants.all().len(),
            "opened arbor state"
        );
        Ok(Self {
            fs: TreeFs::new(Arc::new(LocalProvider::new()), Arc::new(grants)),
        })
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
