mod insights_test;
