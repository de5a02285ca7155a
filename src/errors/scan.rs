#[derive(thiserror::Error, Debug)]
pub enum LoadErrorKind {
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ScanErrorKind {
    #[error("Failed to load scanned type `{type_name}`")]
    Load {
        type_name: &'static str,
        #[source]
        source: LoadErrorKind,
    },
}
