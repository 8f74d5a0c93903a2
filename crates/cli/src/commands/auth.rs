//! Session commands.

use designi_storefront::error::{clear_sentry_user, set_sentry_user};
use designi_storefront::models::User;
use designi_storefront::state::AppState;
use designi_storefront::store::KeyValueStore;

use super::CliError;

/// One-line description of a user.
pub fn describe(user: &User) -> String {
    format!("{} <{}> [{}]", user.name, user.email, user.role)
}

/// `designi register`
#[allow(clippy::print_stdout)]
pub fn register<S: KeyValueStore>(
    state: &AppState<S>,
    name: &str,
    email: &str,
    phone: &str,
) -> Result<(), CliError> {
    let user = state.auth().sign_up(name, email, phone)?;
    set_sentry_user(&user.id, Some(user.email.as_str()));
    println!("Conta criada. Bem-vindo(a), {}", describe(&user));
    Ok(())
}

/// `designi login`
#[allow(clippy::print_stdout)]
pub fn login<S: KeyValueStore>(
    state: &AppState<S>,
    email: &str,
    phone: &str,
) -> Result<(), CliError> {
    let user = state.auth().sign_in(email, phone)?;
    set_sentry_user(&user.id, Some(user.email.as_str()));
    println!("Olá, {}", describe(&user));
    Ok(())
}

/// `designi logout`
#[allow(clippy::print_stdout)]
pub fn logout<S: KeyValueStore>(state: &AppState<S>) -> Result<(), CliError> {
    state.auth().sign_out()?;
    clear_sentry_user();
    println!("Sessão encerrada.");
    Ok(())
}

/// `designi whoami`
#[allow(clippy::print_stdout)]
pub fn whoami<S: KeyValueStore>(state: &AppState<S>) {
    match state.session().current_user() {
        Some(user) => println!("{}", describe(&user)),
        None => println!("Nenhum usuário conectado."),
    }
}
