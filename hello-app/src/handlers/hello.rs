use common::GREETING;

pub async fn hello_handler() -> &'static str {
    tracing::info!("Serving the Hello World response");
    tracing::info!("Diagnostic Message : Inside the Hello Method.......");
    GREETING
}
