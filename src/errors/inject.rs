use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum InjectErrorKind {
    #[error("Injection target type mismatch. Expected: {expected:?}")]
    TargetTypeMismatch { expected: TypeInfo },
    #[error("Injected dependency type mismatch. Expected: {expected:?}")]
    DependencyTypeMismatch { expected: TypeInfo },
}
