//! Exit handling: signal handlers and terminal cleanup.

const SHOW_CURSOR: &[u8] = b"\x1b[0m\x1b[?25h\r\n";

/// Put the tty back into cooked mode with echo.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit so raw mode never outlives the process.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, SHOW_CURSOR.as_ptr() as *const libc::c_void, SHOW_CURSOR.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: leave through exit so atexit cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: restore the terminal, then re-raise for the default action.
extern "C" fn crash_handler(sig: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Call early in main.
pub fn install_handlers() {
    let exit_handler = signal_handler as *const () as libc::sighandler_t;
    let abort_handler = crash_handler as *const () as libc::sighandler_t;
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, exit_handler);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, abort_handler);
        }
    }
}

pub fn reset_terminal() {
    reset_terminal_termios();
}
