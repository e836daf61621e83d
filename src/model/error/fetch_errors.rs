/// a warmup request didn't complete. Any response at all, whatever its status, is not an error
#[derive(PartialEq, Debug)]
pub enum FetchError {
    /// the request failed at the network layer. Holds the client's description
    Network(String),
}
