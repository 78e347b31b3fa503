pub mod application {
    pub mod notification {
        pub mod compact;
        pub mod get_settings;
        pub mod permission_status;
        pub mod request_permission;
        pub mod schedule;
        pub mod sync_settings;
        pub mod update_settings;
    }
    pub mod product {
        pub mod get_all;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notification {
        pub mod dispatcher;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod state;
        pub mod use_cases {
            pub mod compact;
            pub mod get_settings;
            pub mod permission_status;
            pub mod request_permission;
            pub mod schedule;
            pub mod sync_settings;
            pub mod update_settings;
        }
    }
    pub mod product {
        pub mod dashboard;
        pub mod errors;
        pub mod expiry_date;
        pub mod model;
        pub mod repository;
        pub mod status;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod shared {
        pub mod clock;
        pub mod value_objects;
    }
}

#[cfg(test)]
mod test_support;
