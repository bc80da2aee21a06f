use crate::error::CommonError;

/// Result alias for fallible loaders (config files, exemption tables, class input)
pub type CommonResult<T> = Result<T, CommonError>;
