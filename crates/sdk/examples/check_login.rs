use alfio_admin::SDK;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sdk = SDK::with_basic_auth(
        "http://localhost:8080".to_string(),
        "admin".to_string(),         // Username from ALFIO_ADMIN_USERNAME
        "your_password".to_string(), // Password from ALFIO_ADMIN_PASSWORD
    );

    // Never fails: any error is logged and reported as not logged in
    if sdk.is_logged_in().await {
        println!("✅ Logged in");
    } else {
        println!("❌ Not logged in");
    }

    // Same request, but failures are surfaced
    match sdk.user.status().await {
        Ok(response) => println!("status {}: {:?}", response.status, response.body),
        Err(e) => println!("❌ Status check failed: {}", e),
    }

    Ok(())
}
