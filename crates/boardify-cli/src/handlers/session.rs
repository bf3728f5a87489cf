use crate::cli::CredentialArgs;
use crate::context::CliContext;
use crate::output;
use boardify_domain::{BoardifyOperations, UserCredentials};

fn credentials(args: CredentialArgs) -> UserCredentials {
    UserCredentials::new(args.username, args.password)
}

pub async fn handle_login(ctx: &CliContext, args: CredentialArgs) -> anyhow::Result<()> {
    let username = args.username.clone();
    ctx.service.login(&credentials(args)).await?;
    output::output_success(serde_json::json!({ "logged_in": true, "username": username }))
}

pub async fn handle_register(ctx: &CliContext, args: CredentialArgs) -> anyhow::Result<()> {
    let user = ctx.service.register(&credentials(args)).await?;
    output::output_success(&user)
}

pub async fn handle_logout(ctx: &CliContext) -> anyhow::Result<()> {
    ctx.service.logout().await?;
    output::output_success(serde_json::json!({ "logged_in": false }))
}

pub async fn handle_status(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_success(serde_json::json!({
        "logged_in": ctx.service.is_logged_in().await,
        "backend_uri": ctx.service.base_url(),
        "credential_store": ctx.config.credential_store,
    }))
}

pub async fn handle_whoami(ctx: &CliContext) -> anyhow::Result<()> {
    let user = ctx.service.current_user().await?;
    output::output_success(&user)
}
