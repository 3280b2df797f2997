pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod scheduler;
        pub mod submission_transport;
    }
}

pub mod modules {
    pub mod registration {
        pub mod core {
            pub mod fields;
            pub mod form;
            pub mod modal;
            pub mod page;
            pub mod record;
            pub mod toast;
        }
        pub mod use_cases {
            pub mod validate_registration {
                pub mod report;
                pub mod validate;
            }
            pub mod submit_registration {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_page {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod dispatch;
            }
        }
        pub mod workflow;
    }
}

pub mod shell;
