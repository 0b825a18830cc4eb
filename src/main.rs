#[tokio::main]
async fn main() {
    lumina_hotel_api::run().await;
}
