pub mod sniffer;
