//! Seams the host plugs into: the HTTP transport and the download sink.

mod saver;
mod transport;

pub use saver::FileSaver;
pub use transport::Transport;
