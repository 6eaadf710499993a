pub mod application {
    pub mod favorites {
        pub mod add;
        pub mod load;
        pub mod remove;
    }
    pub mod recipe {
        pub mod fetch;
        pub mod get_detail;
        pub mod load_more;
        pub mod search;
    }
    pub mod search_history {
        pub mod load;
        pub mod record;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod favorites {
        pub mod model;
        pub mod repository;
        pub mod sorting;
        pub mod use_cases {
            pub mod add;
            pub mod load;
            pub mod remove;
        }
    }
    pub mod recipe {
        pub mod catalog;
        pub mod errors;
        pub mod fetch_guard;
        pub mod model;
        pub mod result_set;
        pub mod summary;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_detail;
            pub mod load_more;
            pub mod search;
        }
    }
    pub mod search_history {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod load;
            pub mod record;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
