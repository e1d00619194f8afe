/*---------- Imports ----------*/
use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use thiserror::Error;

/*---------- Enums ----------*/
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing path from the request event")]
    MissingPath,
}

pub fn extract_path(event: &ApiGatewayProxyRequest) -> Result<&str, RequestError> {
    event.path.as_deref().ok_or(RequestError::MissingPath)
}
