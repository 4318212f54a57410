/// Transport saturation signal.
///
/// Queried immediately before each transfer attempt. While the signal reports
/// congestion the coordinator never invokes the transfer trigger; it backs
/// off and re-checks when the retry timer expires.
pub trait CongestionSignal {
    fn is_congested(&self) -> bool;
}
