pub mod server;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        gotrue_url: String,
        gotrue_api_key: SecretString,
    },
}
