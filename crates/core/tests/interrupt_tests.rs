//! Ctrl-C handling while a tool runs.
//!
//! Kept in its own test binary: the child sends SIGINT to this process.

#[cfg(unix)]
#[test]
fn test_interrupt_during_tool_keeps_launcher_alive() {
    use media_menu_core::action_definitions::ProgramInvocation;
    use media_menu_core::execution::run_program;

    let interrupting_tool = ProgramInvocation {
        program: "sh".to_string(),
        arguments: vec![
            "-c".to_string(),
            "kill -INT $PPID; sleep 1; exit 130".to_string(),
        ],
        working_directory: None,
        environment: None,
    };

    let status = run_program(&interrupting_tool).unwrap();

    // Reaching this line means the interrupt did not end the test process
    assert_eq!(status.code(), Some(130));
}
