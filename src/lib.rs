pub mod config;

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod model;
        }
        pub mod store;
        pub mod use_cases {
            pub mod get_event;
            pub mod list_events;
            pub mod register_event;
            pub mod response;
        }
    }
}

pub mod shell;
