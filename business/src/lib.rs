pub mod application {
    pub mod catalog {
        pub mod controller;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod list_view_model;
        pub mod ports;
        pub mod refresh_sequencer;
        pub mod view_state;
    }
    pub mod product {
        pub mod draft;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
        }
    }
}
