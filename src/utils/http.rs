/*---------- Imports ----------*/
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

pub struct HttpResponse;

impl HttpResponse {
    pub fn build_greeting_response(path: &str) -> ApiGatewayProxyResponse {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        ApiGatewayProxyResponse {
            status_code: 200,
            headers: headers.clone(),
            multi_value_headers: headers,
            body: Some(Body::Text(format!("Hello, CDK! You've hit {}\n", path))),
            is_base64_encoded: Some(false),
        }
    }
}
