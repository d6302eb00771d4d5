pub mod shared {
    pub mod config;
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod criteria;
            pub mod event_record;
            pub mod merge;
            pub mod validation;
            pub mod view;
            pub mod window;
        }
        pub mod application {
            pub mod errors;
            pub mod remote_event_store;
        }
        pub mod use_cases {
            pub mod fetch_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod browse_events {
                pub mod browser;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_for_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod event_analytics {
                pub mod report;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod events_remote;
                pub mod events_remote_http;
                pub mod events_remote_in_memory;
            }
        }
    }
}

pub mod shell;
