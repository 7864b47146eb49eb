//! # Get Token
//!
//! Mints a bearer token for the configured test account: logs in, or
//! registers and then logs in, prints usage instructions and saves the
//! token file for reuse by `api-harness`.

use anyhow::Result;

use workflow_api_harness::application::services::TokenProvisioner;
use workflow_api_harness::config::Settings;
use workflow_api_harness::infrastructure::http::ApiClient;
use workflow_api_harness::infrastructure::token_store::TokenFile;
use workflow_api_harness::presentation::token_banner;

#[tokio::main]
async fn main() -> Result<()> {
    workflow_api_harness::telemetry::init_tracing();

    let settings = Settings::load()?;
    let client = ApiClient::new(&settings.api)?;
    let provisioner = TokenProvisioner::new(&client, settings.account.clone());

    println!("{}", token_banner::render_header(&settings.account.email));

    let provisioned = match provisioner.provision().await {
        Ok(provisioned) => provisioned,
        Err(e) => {
            let hint = token_banner::render_hint(&e, &settings.api);
            let err = anyhow::Error::new(e);
            return Err(match hint {
                Some(hint) => err.context(hint),
                None => err,
            });
        }
    };

    TokenFile::new(
        provisioned.token.clone(),
        provisioned.user.email.clone(),
        provisioned.user.id.clone(),
    )
    .write(&settings.auth.token_file)
    .await?;

    println!(
        "\n{}",
        token_banner::render_token(&provisioned, &settings.api.base_url, &settings.auth.token_file)
    );
    Ok(())
}
