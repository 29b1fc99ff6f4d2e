mod tests_source;
