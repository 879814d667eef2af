pub mod benchmark_data;
