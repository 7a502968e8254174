error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        NotifierUnavailable(program: String) {
            description("notifier unavailable")
            display("the {} tool is not available", program)
        }

        InvalidOption(t: String) {
            description("invalid notifier option")
            display("invalid notifier option: '{}'", t)
        }

        InvalidPriority(t: String) {
            description("invalid notification priority")
            display("invalid notification priority: '{}'", t)
        }
    }
}
