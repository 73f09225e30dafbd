use crate::{
    cli::{actions::Action, globals::GlobalArgs},
    gotrue, pordego,
};
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            gotrue_url,
            gotrue_api_key,
        } => {
            let globals = GlobalArgs::new(gotrue_url, gotrue_api_key);

            // Provider client is built once and shared read-only by every request
            let client = gotrue::Client::new(&globals)?;

            pordego::new(port, client).await?;
        }
    }

    Ok(())
}
