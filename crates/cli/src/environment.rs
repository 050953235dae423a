/// Loads environment variables from a .env file in the working directory, if there is one.
///
/// Variables already set in the process environment take precedence.
pub fn load_env() {
    dotenvy::dotenv().ok();
}
