use secrecy::SecretString;

#[derive(Clone)]
pub struct GlobalArgs {
    pub gotrue_url: String,
    pub gotrue_api_key: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(url: String, api_key: SecretString) -> Self {
        Self {
            gotrue_url: url,
            gotrue_api_key: api_key,
        }
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("gotrue_url", &self.gotrue_url)
            .field("gotrue_api_key", &"***")
            .finish()
    }
}
