// UDP tracker documentation:
//
// BEP 15. UDP Tracker Protocol for BitTorrent
// https://www.bittorrent.org/beps/bep_0015.html
//
// BEP 41. UDP Tracker Protocol Extensions
// https://www.bittorrent.org/beps/bep_0041.html
pub mod contract;
pub mod robustness;
