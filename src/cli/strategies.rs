use clap::Args;

use crate::authenticator::Authenticator;
use crate::Result;

/// List registered strategies
#[derive(Args, Debug)]
pub struct StrategiesCommand {}

impl StrategiesCommand {
    pub fn run(self, authenticator: &Authenticator) -> Result<()> {
        for name in authenticator.names() {
            println!("{}", name);
        }
        Ok(())
    }
}
