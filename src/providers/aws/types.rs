/// Client for the classic (`elb`) API.
#[derive(Debug, Clone)]
pub struct ClassicClient {
    pub client: aws_sdk_elasticloadbalancing::Client,
}

/// Client for the v2 (`elbv2`) API.
#[derive(Debug, Clone)]
pub struct ApplicationClient {
    pub client: aws_sdk_elasticloadbalancingv2::Client,
}
