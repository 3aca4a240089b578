pub mod application {
    pub mod cart {
        pub mod apply_delta;
        pub mod create;
        pub mod get;
        pub mod get_id;
        pub mod get_items;
        pub(crate) mod orchestrator;
        pub mod update;
    }
    pub mod product {
        pub mod get_by_id;
        pub mod search;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod policy;
        pub mod repository;
        pub mod use_cases {
            pub mod apply_delta;
            pub mod create;
            pub mod get;
            pub mod get_id;
            pub mod get_items;
            pub mod update;
        }
    }
    pub mod pricing {
        pub mod delta;
        pub mod errors;
        pub mod lot;
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod search;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}

#[cfg(test)]
mod test_doubles;
