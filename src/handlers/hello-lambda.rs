/*---------- Imports ----------*/
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use hello_cdk_infra::utils::http::HttpResponse;
use hello_cdk_infra::utils::request;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    let handler = service_fn(handler_fn);

    lambda_runtime::run(handler).await?;

    Ok(())
}

async fn handler_fn(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let path = request::extract_path(&event.payload)?;
    info!("Greeting request for {}", path);

    Ok(HttpResponse::build_greeting_response(path))
}
