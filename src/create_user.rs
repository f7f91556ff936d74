//! Seeds an admin credential.
//!
//! ```text
//! ROOMGRID_ADMIN_PASSWORD=... create-user <username> <display_name>
//! ```
//!
//! The password is read from the environment so it never shows up in a
//! process listing.

use clap::Parser;
use color_eyre::eyre::{bail, Result, WrapErr};
use dotenv::dotenv;
use roomgrid_core::errors::GridError;
use roomgrid_db::{
    close_pool, create_pool, errors::classify_report, repositories::credential,
    schema::initialize_database,
};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_PASSWORD_ENV: &str = "ROOMGRID_ADMIN_PASSWORD";

#[derive(Debug, Parser)]
#[command(name = "create-user", about = "Create an admin credential for RoomGrid")]
#[command(version)]
struct CreateUserArgs {
    /// Login name, unique across credentials
    username: String,

    /// Name shown after a successful login
    display_name: String,

    /// Environment variable holding the password
    #[arg(long, value_name = "VAR", default_value = DEFAULT_PASSWORD_ENV)]
    password_env: String,
}

impl CreateUserArgs {
    fn password(&self) -> Result<String> {
        let password = std::env::var(&self.password_env)
            .wrap_err_with(|| format!("{} environment variable must be set", self.password_env))?;

        if password.is_empty() {
            bail!("{} must not be empty", self.password_env);
        }
        Ok(password)
    }

    fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.display_name.trim().is_empty() {
            bail!("username and display name must not be empty");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let args = CreateUserArgs::parse();

    tracing::subscriber::set_global_default(FmtSubscriber::builder().finish())?;

    args.validate()?;
    let password = args.password()?;
    let username = args.username.trim();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;
    let db_pool = create_pool(&database_url, 1).await?;
    initialize_database(&db_pool).await?;

    let outcome =
        credential::create_credential(&db_pool, username, &password, args.display_name.trim())
            .await;
    close_pool(&db_pool).await;

    match outcome {
        Ok(created) => {
            info!("Created credential for {}", created.username);
            Ok(())
        }
        Err(report) => match classify_report(report) {
            GridError::ConstraintViolation(_) => {
                error!("Username {} is already taken", username);
                bail!("username already exists")
            }
            other => Err(other.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positionals_and_default_password_env() {
        let args = CreateUserArgs::try_parse_from(["create-user", "registrar", "Front Desk"]).unwrap();

        assert_eq!(args.username, "registrar");
        assert_eq!(args.display_name, "Front Desk");
        assert_eq!(args.password_env, DEFAULT_PASSWORD_ENV);
    }

    #[test]
    fn test_missing_display_name_is_a_usage_error() {
        let err = CreateUserArgs::try_parse_from(["create-user", "registrar"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_password_is_not_a_positional() {
        let err = CreateUserArgs::try_parse_from(["create-user", "registrar", "s3cret", "Front Desk"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_password_read_from_named_variable() {
        let var = "ROOMGRID_CREATE_USER_TEST_PASSWORD";
        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var(var, "s3cret") };

        let args = CreateUserArgs::try_parse_from([
            "create-user",
            "registrar",
            "Front Desk",
            "--password-env",
            var,
        ])
        .unwrap();

        assert_eq!(args.password().unwrap(), "s3cret");
    }

    #[test]
    fn test_unset_password_variable_is_an_error() {
        let args = CreateUserArgs::try_parse_from([
            "create-user",
            "registrar",
            "Front Desk",
            "--password-env",
            "ROOMGRID_CREATE_USER_UNSET_VARIABLE",
        ])
        .unwrap();

        assert!(args.password().is_err());
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let args = CreateUserArgs::try_parse_from(["create-user", "  ", "Front Desk"]).unwrap();
        assert!(args.validate().is_err());
    }
}
