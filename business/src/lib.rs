pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all_paged;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod model;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all_paged;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod pagination;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
