use seekulator_engine::InvalidInput;

pub struct CliError(pub String);

impl From<InvalidInput> for CliError {
    fn from(e: InvalidInput) -> Self {
        CliError(e.message().to_string())
    }
}
