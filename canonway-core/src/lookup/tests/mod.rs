mod alias_tests;
