#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    eviction_notice_server::run().await
}
