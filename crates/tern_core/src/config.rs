//! Configuration for a VM instance.

use tern_foundation::DEFAULT_PRECISION;

/// Where the `IO` class writes its text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputChannel {
    /// The host process's standard output.
    #[default]
    Stdout,
    /// An in-memory buffer, read back with [`Vm::output`](crate::Vm::output).
    Capture,
}

/// Configuration for a VM instance.
///
/// Fixed at construction; the VM never changes it afterwards.
#[derive(Clone, Debug)]
pub struct VmConfig {
    /// Destination of `IO.write` output.
    pub output: OutputChannel,

    /// Significant digits used when turning numbers into text.
    pub number_precision: usize,

    /// Initial capacity of the symbol table.
    pub symbol_capacity: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            output: OutputChannel::Stdout,
            number_precision: DEFAULT_PRECISION,
            symbol_capacity: 64,
        }
    }
}

impl VmConfig {
    /// Creates a configuration that captures output instead of printing it.
    #[must_use]
    pub fn capturing() -> Self {
        Self {
            output: OutputChannel::Capture,
            ..Self::default()
        }
    }

    /// Builder method to set the output channel.
    #[must_use]
    pub fn with_output(mut self, output: OutputChannel) -> Self {
        self.output = output;
        self
    }

    /// Builder method to set the number precision.
    ///
    /// A precision of zero is treated as one.
    #[must_use]
    pub fn with_number_precision(mut self, precision: usize) -> Self {
        self.number_precision = precision;
        self
    }

    /// Builder method to set the initial symbol table capacity.
    #[must_use]
    pub fn with_symbol_capacity(mut self, capacity: usize) -> Self {
        self.symbol_capacity = capacity;
        self
    }
}
