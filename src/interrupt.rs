//! Ctrl-C handling for the interactive session.

use crate::session::INTERRUPTED_MESSAGE;

/// Exit status after an operator interrupt
pub const INTERRUPT_EXIT_CODE: i32 = 0;

extern "C" fn on_sigint(_sig: libc::c_int) {
    // Only async-signal-safe calls here: raw write(2) and _exit(2).
    // Prompts are flushed before every read, so nothing is left in the
    // stdout buffer that this would skip.
    write_stdout(b"\n\n");
    write_stdout(INTERRUPTED_MESSAGE.as_bytes());
    write_stdout(b"\n");
    unsafe {
        libc::_exit(INTERRUPT_EXIT_CODE);
    }
}

fn write_stdout(bytes: &[u8]) {
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            bytes.as_ptr() as *const libc::c_void,
            bytes.len(),
        );
    }
}

/// Install the SIGINT handler that prints the interruption message and
/// exits cleanly. Must run before the session starts prompting.
pub fn install() -> Result<(), String> {
    let previous = unsafe { libc::signal(libc::SIGINT, on_sigint as libc::sighandler_t) };
    if previous == libc::SIG_ERR {
        return Err(format!(
            "Failed to install SIGINT handler: {}",
            std::io::Error::last_os_error()
        ));
    }
    Ok(())
}
