//! IO primitives.

use tern_foundation::Value;

use crate::vm::Vm;

/// IO: `write ` - prints the argument's text and a newline, returns the argument.
///
/// The unsupported sentinel is declined without printing.
pub(crate) fn io_write(vm: &mut Vm, args: &[Value]) -> Value {
    let Some(value) = args.get(1).filter(|v| !v.is_unsupported()) else {
        return Value::Unsupported;
    };
    let text = vm.render(value);
    vm.write_line(&text);
    value.clone()
}
