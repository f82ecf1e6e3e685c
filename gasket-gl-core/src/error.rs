//! errors raised while setting up GL programs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("failed to link shader program: {log}")]
    ProgramLink { log: String },

    #[error("can't find shader variable: {name}")]
    MissingVariable { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let e = Error::MissingVariable {
            name: "zoom".to_string(),
        };
        assert_eq!(e.to_string(), "can't find shader variable: zoom");
        let e = Error::ShaderCompile {
            stage: "vertex",
            log: "0:3 syntax error".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to compile vertex shader: 0:3 syntax error"
        );
    }
}
