mod table_test;
