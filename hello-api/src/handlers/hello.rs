use common::GREETING;

/// Root endpoint
///
/// Returns 200 OK with the fixed greeting, ignoring all request content
pub async fn hello_handler() -> &'static str {
    tracing::info!("Serving the Hello World response");
    tracing::info!("Diagnostic Message : Inside the Hello Method.......");
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_handler() {
        let body = hello_handler().await;
        assert_eq!(
            body,
            "Hello World! This is from Container Deployed using Terraform"
        );
    }
}
